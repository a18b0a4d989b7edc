use std::fmt::Write as _;

use bevy::prelude::*;
use fame_clicker::{BoostKind, UpgradeCategory, format_currency, format_number};

use super::resources::{HudText, SessionState};

const PROGRESS_BAR_WIDTH: usize = 20;
const LEADERBOARD_ROWS: usize = 5;
const UPGRADE_HOTKEYS: usize = 9;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Loading..."),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.96, 0.93, 0.82)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(14.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn refresh_hud(session: Res<SessionState>, mut hud_query: Query<&mut Text, With<HudText>>) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };
    *hud = Text::new(render_hud(&session));
}

fn boost_key(kind: BoostKind) -> char {
    match kind {
        BoostKind::Energy => 'E',
        BoostKind::Multitap => 'M',
        BoostKind::Limit => 'L',
        BoostKind::Regen => 'R',
    }
}

fn render_hud(session: &SessionState) -> String {
    let engine = &session.engine;
    let player = &engine.player;
    let mut out = String::new();

    let cheater = if player.is_cheater { "  [CHEATER]" } else { "" };
    let admin = if session.identity.is_admin { "  [ADMIN]" } else { "" };
    let _ = writeln!(
        out,
        "{} - {} (Lv {}){cheater}{admin}",
        player.character_name,
        engine.rank_name(),
        player.level
    );
    let _ = writeln!(
        out,
        "Fame: {}   +{}/h   +{} per tap",
        format_currency(player.balance),
        format_number(player.fame_per_hour),
        player.click_damage
    );

    let progress = engine.level_progress();
    let filled = (progress.fraction * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "{}{}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH.saturating_sub(filled))
    );
    if progress.is_max_level {
        let _ = writeln!(out, "Rank [{bar}] MAX LEVEL");
    } else {
        let _ = writeln!(
            out,
            "Rank [{bar}] {} / {}",
            format_number(player.balance),
            format_number(progress.next_threshold as f64)
        );
    }
    let _ = writeln!(
        out,
        "Energy: {} / {}  ({}/s)",
        player.energy.floor(),
        player.max_energy,
        player.energy_regen_rate
    );

    let _ = writeln!(out, "\nAcademy (1-9)");
    for &category in UpgradeCategory::all() {
        let mut header_written = false;
        for upgrade in engine.upgrades.in_category(category) {
            let Some(index) = engine
                .upgrades
                .iter()
                .position(|candidate| candidate.id == upgrade.id)
                .filter(|index| *index < UPGRADE_HOTKEYS)
            else {
                continue;
            };
            if !header_written {
                let _ = writeln!(out, " {}", category.label());
                header_written = true;
            }
            let marker = if engine.can_afford_upgrade(&upgrade.id) {
                "*"
            } else {
                " "
            };
            let _ = writeln!(
                out,
                "{marker}{} {:<20} Lv {:<3} cost {:<8} +{}/h",
                index + 1,
                upgrade.name,
                upgrade.level,
                format_number(upgrade.cost as f64),
                format_number(upgrade.base_profit as f64)
            );
        }
    }

    let _ = writeln!(out, "\nBoosts");
    for boost in session.catalog.daily_boosts() {
        let _ = writeln!(
            out,
            " {} {:<18} free  {}",
            boost_key(boost.kind),
            boost.name,
            boost.effect_description
        );
    }
    for boost in session.catalog.upgradeable_boosts() {
        let marker = if engine.can_afford_boost(boost) { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker}{} {:<18} Lv {:<3} cost {:<8} {}",
            boost_key(boost.kind),
            boost.name,
            engine.boost_level(boost.kind),
            format_number(engine.boost_cost(boost) as f64),
            boost.effect_description
        );
    }

    if let Some(report) = &session.offline_notice {
        let _ = writeln!(
            out,
            "\nWhile you were away your academy earned +{} (Enter to close)",
            format_number(report.earned as f64)
        );
    }
    if let Some(referrer) = &session.referred_by {
        let _ = writeln!(out, "\nWelcome! You were invited by {referrer}.");
    }
    if let Some(advice) = &session.advice {
        let _ = writeln!(out, "\nCoach: {advice}");
    }
    if let Some(wallet) = &player.wallet_address {
        let _ = writeln!(out, "\nWallet: {wallet}");
    }
    let _ = writeln!(out, "Friends invited: {}", player.referrals.len());

    if !session.leaderboard.is_empty() {
        let _ = writeln!(out, "\nLeaderboard");
        for entry in session.leaderboard.iter().take(LEADERBOARD_ROWS) {
            let _ = writeln!(
                out,
                " {:>2}. {:<20} {}",
                entry.rank,
                entry.name,
                format_number(entry.balance)
            );
        }
        if let Some(me) = session
            .leaderboard
            .iter()
            .find(|entry| entry.is_current_player && entry.rank > LEADERBOARD_ROWS)
        {
            let _ = writeln!(
                out,
                " {:>2}. {:<20} {}",
                me.rank,
                me.name,
                format_number(me.balance)
            );
        }
    }

    let save_line = session
        .last_save_error
        .as_deref()
        .map(|msg| format!("Save: {msg}"))
        .unwrap_or_else(|| "Save: OK (autosave on)".to_string());
    let _ = write!(
        out,
        "\n{save_line}\nSpace/click tap, 1-9 upgrades, E/M/L/R boosts, A coach, T leaderboard"
    );

    out
}
