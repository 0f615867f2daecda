//! Splitting text into whitespace runs and colored word runs.

use crate::dom::Run;

/// Split `text` into alternating whitespace and non-whitespace runs.
///
/// Whitespace is preserved verbatim. Words are numbered from zero within
/// this call and colored `(index % palette_size) + 1`.
pub fn split_runs(text: &str, palette_size: usize) -> Vec<Run> {
    let palette_size = palette_size.max(1);
    let mut runs = Vec::new();
    let mut word_index = 0;
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(current) if current != space => {
                runs.push(make_run(&text[start..idx], current, &mut word_index, palette_size));
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(current) = in_space {
        runs.push(make_run(&text[start..], current, &mut word_index, palette_size));
    }
    runs
}

fn make_run(piece: &str, space: bool, word_index: &mut usize, palette_size: usize) -> Run {
    if space {
        return Run::Space(piece.to_string());
    }
    let color = (*word_index % palette_size) + 1;
    *word_index += 1;
    Run::Word {
        text: piece.to_string(),
        color,
    }
}

/// True when `text` has something worth tokenizing.
pub fn is_tokenizable(text: &str) -> bool {
    !text.trim().is_empty()
}
