// src/cli/display.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::folder::Folder;
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Plain text block for one bookmark; `folder_label` maps the stored folder for display
pub fn format_bookmark(bookmark: &Bookmark, folder_label: &str) -> String {
    let id = bookmark
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut folder = folder_label.to_string();
    if bookmark.in_subfolder {
        folder.push_str(" (toolbar subfolder)");
    }
    format!(
        "{:>4}. {}\n      {}\n      {}",
        id,
        bookmark.title.as_str().green().bold(),
        bookmark.url.as_str().yellow(),
        folder.as_str().cyan()
    )
}

pub fn show_bookmarks<F>(bookmarks: &[Bookmark], folder_label: F) -> io::Result<()>
where
    F: Fn(&str) -> String,
{
    let mut out = io::stdout().lock();
    for bookmark in bookmarks {
        writeln!(
            out,
            "{}",
            format_bookmark(bookmark, &folder_label(&bookmark.folder))
        )?;
    }
    Ok(())
}

pub fn show_folders<F>(folders: &[Folder], folder_label: F) -> io::Result<()>
where
    F: Fn(&str) -> String,
{
    let mut out = io::stdout().lock();
    for folder in folders {
        let marker = if folder.is_subfolder() { " [toolbar]" } else { "" };
        writeln!(
            out,
            "{}{}",
            folder_label(&folder.name).as_str().cyan(),
            marker
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::test_icon;

    #[test]
    fn given_subfolder_bookmark_when_formatted_then_contains_fields() {
        crossterm::style::force_color_output(false);
        let mut bookmark = Bookmark::from_storage(
            7,
            "https://a.example".to_string(),
            "A".to_string(),
            "tools".to_string(),
            test_icon([0, 0, 0, 255]),
            true,
        )
        .unwrap();
        let text = format_bookmark(&bookmark, "tools");
        assert!(text.contains("7."));
        assert!(text.contains("https://a.example"));
        assert!(text.contains("toolbar subfolder"));

        bookmark.in_subfolder = false;
        assert!(!format_bookmark(&bookmark, "tools").contains("subfolder"));
    }
}
