//! Terminal output sanitization
//!
//! Message content comes straight out of a third-party data file and is printed by
//! the `show` command and drawn by the TUI. Escape sequences embedded in that
//! content could move the cursor, recolor the terminal or set the window title, so
//! everything passes through [`sanitize_for_terminal`] before display.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Removes escape sequences and control characters from `text`
///
/// Strips CSI sequences (`ESC [ ... final-byte`), OSC sequences (`ESC ] ...`
/// terminated by BEL or `ESC \`), lone two-byte escapes, and every other control
/// character except tab and newline. Carriage returns are dropped so a message
/// cannot overwrite the line it is printed on.
///
/// # Examples
///
/// ```
/// use chat_store_explorer::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(sanitize_for_terminal("\x1b]0;title\x07body"), "body");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                Some('[') => {
                    // Parameters and intermediates run until a byte in 0x40..=0x7e
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }

        out.push(ch);
    }

    out
}
