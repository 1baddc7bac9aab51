use screen_core::DisplayState;

const TITLE: &str = "Il tempo a Roma";
const SCREEN_WIDTH: usize = 40;

/// Lay out the screen: centered title over one row with both labels.
///
/// Blank display values render as blank label suffixes; no error text is
/// ever shown here.
pub fn render(state: &DisplayState) -> String {
    let row = format!(
        "Min Temp ={}   Max Temp ={}",
        state.min_temp, state.max_temp
    );
    format!("{}\n{}\n", center(TITLE, SCREEN_WIDTH), row)
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_both_labels() {
        let state = DisplayState {
            min_temp: "280.1".to_string(),
            max_temp: "290.4".to_string(),
        };
        let screen = render(&state);

        assert!(screen.contains("Il tempo a Roma"));
        assert!(screen.contains("Min Temp =280.1"));
        assert!(screen.contains("Max Temp =290.4"));
    }

    #[test]
    fn blank_state_renders_blank_values() {
        let screen = render(&DisplayState::default());
        assert!(screen.contains("Min Temp ="));
        assert!(screen.contains("Max Temp ="));
    }

    #[test]
    fn title_line_is_centered() {
        let screen = render(&DisplayState::default());
        let title_line = screen.lines().next().expect("title line");
        assert!(title_line.starts_with(' '));
        assert!(title_line.trim() == TITLE);
    }
}
