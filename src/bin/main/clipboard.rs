use std::process::Command;

use log::debug;

use super::loading::LoadError;

/// Platform clipboard readers, tried in order.
const CLIPBOARD_READERS: &[(&str, &[&str])] = &[
    ("pbpaste", &[]),
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
    ("powershell", &["-NoProfile", "-Command", "Get-Clipboard"]),
];

pub(super) fn load_text_from_clipboard() -> Result<String, LoadError> {
    let mut failures = Vec::new();

    for (program, args) in CLIPBOARD_READERS {
        match Command::new(program).args(*args).output() {
            Ok(output) if output.status.success() => {
                debug!("clipboard: read {} bytes via {}", output.stdout.len(), program);
                return check_clipboard_text(String::from_utf8_lossy(&output.stdout).into_owned());
            }
            Ok(output) => failures.push(format!("{program} exited with {}", output.status)),
            Err(err) => failures.push(format!("{program}: {err}")),
        }
    }

    Err(LoadError::ClipboardUnavailable(failures.join("; ")))
}

pub(super) fn check_clipboard_text(text: String) -> Result<String, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::ClipboardEmpty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_text_is_returned_untouched() {
        let text = "Hello, world!\nLine 2 MiXeD";
        assert_eq!(check_clipboard_text(text.to_owned()).ok().as_deref(), Some(text));
    }

    #[test]
    fn blank_clipboard_is_an_error() {
        for text in ["", "   \n\t  \n  "] {
            assert!(matches!(
                check_clipboard_text(text.to_owned()),
                Err(LoadError::ClipboardEmpty)
            ));
        }
    }
}
