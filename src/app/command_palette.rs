use crate::domain::command::{CommandDefinition, CommandGroup, CommandKind, ConfirmableEffect, Icon};
use crate::domain::page::{Profile, Section};
use crate::i18n::Strings;

/// The palette's catalog, derived from host state.
///
/// `copied` swaps the email entry for its confirmation label, so this has to
/// be rebuilt whenever that flag changes rather than cached.
#[must_use]
pub fn build_registry(strings: &Strings, profile: &Profile, copied: bool) -> Vec<CommandGroup> {
    let navigation = Section::all()
        .iter()
        .map(|section| {
            CommandDefinition::new(
                section.id(),
                section.label(strings),
                section_icon(*section),
                CommandKind::Navigate { target: *section },
            )
        })
        .collect();

    let mut actions = Vec::new();
    if let Some(cv) = &profile.cv_url {
        actions.push(CommandDefinition::new(
            "cv",
            strings.download_cv,
            Icon::FileText,
            CommandKind::ExternalLink { url: cv.clone() },
        ));
    }
    actions.push(CommandDefinition::new(
        "github",
        "GitHub",
        Icon::GitHub,
        CommandKind::ExternalLink {
            url: profile.github_url.clone(),
        },
    ));
    actions.push(CommandDefinition::new(
        "linkedin",
        "LinkedIn",
        Icon::LinkedIn,
        CommandKind::ExternalLink {
            url: profile.linkedin_url.clone(),
        },
    ));
    actions.push(
        CommandDefinition::new(
            "email",
            if copied { strings.copied } else { strings.copy_email },
            if copied { Icon::Check } else { Icon::Copy },
            CommandKind::ConfirmableAction(ConfirmableEffect::CopyToClipboard {
                text: profile.email.clone(),
            }),
        )
        .highlighted(copied),
    );

    vec![
        CommandGroup::new(strings.group_navigation, navigation),
        CommandGroup::new(strings.group_actions, actions),
    ]
}

fn section_icon(section: Section) -> Icon {
    match section {
        Section::Home => Icon::Home,
        Section::Projects => Icon::Projects,
        Section::Stack => Icon::Stack,
        Section::Contact => Icon::Mail,
    }
}
