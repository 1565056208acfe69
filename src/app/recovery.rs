#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("xdg-open")
        || msg_lower.contains("no opener")
        || msg_lower.contains("no such file or directory")
    {
        suggestions.push("Install xdg-utils or set $BROWSER to open links".to_string());
    }

    if msg_lower.contains("clipboard") || msg_lower.contains("broken pipe") {
        suggestions.push("Your terminal may not support OSC 52 clipboard writes".to_string());
    }

    if msg_lower.contains("palette_hotkey") {
        suggestions.push("Bind ctrl, alt or cmd plus one key, e.g. ctrl+k".to_string());
    }

    if msg_lower.contains("permission denied") {
        suggestions.push("Check the permissions of the opener binary".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions(
            "command 'github' failed: opening https://github.com/jane: No such file or directory",
        );
        assert!(s.contains(&"Install xdg-utils or set $BROWSER to open links".to_string()));

        let s = get_suggestions("command 'email' failed: writing clipboard sequence: Broken pipe");
        assert!(s.contains(&"Your terminal may not support OSC 52 clipboard writes".to_string()));

        let s = get_suggestions("invalid palette_hotkey 'shift+k', using Ctrl+K");
        assert_eq!(s, ["Bind ctrl, alt or cmd plus one key, e.g. ctrl+k"]);

        assert!(get_suggestions("everything is fine").is_empty());
    }
}
