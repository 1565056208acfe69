use super::types::{FooterGroup, FooterItem};
use crate::app::keymap::hotkey_label;
use crate::app::state::{AppMode, AppState};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    if state.last_error.is_some() && state.mode() == AppMode::Normal {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    match state.mode() {
        AppMode::Normal => vec![
            FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem::new("j/k", "scroll"),
                    FooterItem::new("1-4", "jump"),
                ],
            },
            FooterGroup {
                name: "PALETTE",
                items: vec![
                    FooterItem::new(hotkey_label(&state.keymap.palette_hotkey), "search")
                        .highlighted(),
                    FooterItem::new(":", "open"),
                ],
            },
            FooterGroup {
                name: "VIEW",
                items: vec![
                    FooterItem::new("l", "lang"),
                    FooterItem::new("t", "theme"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![FooterItem::new("q", "quit")],
            },
        ],
        AppMode::CommandPalette => vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                FooterItem::new("↑/↓", "move"),
                FooterItem::new("Enter", "run"),
                FooterItem::new("Esc", "close"),
            ],
        }],
    }
}
