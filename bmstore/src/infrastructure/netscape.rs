// src/infrastructure/netscape.rs
use crate::domain::bookmark::Bookmark;
use std::borrow::Cow;
use std::io::{self, Write};

const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
";

const INDENT: &str = "    ";

/// Writes the Netscape bookmark file format.
///
/// Call `write_header`, then any number of folders and the unfiled list, then
/// `write_footer`.
#[derive(Debug)]
pub struct NetscapeHtmlWriter<W: Write> {
    out: W,
}

impl<W: Write> NetscapeHtmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.out.write_all(HEADER.as_bytes())
    }

    pub fn write_folder(
        &mut self,
        name: &str,
        subfolder: bool,
        bookmarks: &[Bookmark],
    ) -> io::Result<()> {
        let flag = if subfolder { "yes" } else { "no" };
        writeln!(
            self.out,
            "{INDENT}<DT><H3 TOOLBAR_SUBFOLDER=\"{}\">{}</H3>",
            flag,
            escape_html(name)
        )?;
        writeln!(self.out, "{INDENT}<DL><p>")?;
        for bookmark in bookmarks {
            self.write_link(2, bookmark)?;
        }
        writeln!(self.out, "{INDENT}</DL><p>")
    }

    pub fn write_unfiled(&mut self, bookmarks: &[Bookmark]) -> io::Result<()> {
        for bookmark in bookmarks {
            self.write_link(1, bookmark)?;
        }
        Ok(())
    }

    pub fn write_footer(&mut self) -> io::Result<()> {
        writeln!(self.out, "</DL><p>")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_link(&mut self, depth: usize, bookmark: &Bookmark) -> io::Result<()> {
        writeln!(
            self.out,
            "{}<DT><A HREF=\"{}\">{}</A>",
            INDENT.repeat(depth),
            escape_html(&bookmark.url),
            escape_html(&bookmark.title)
        )
    }
}

/// Escape `&`, `<`, `>` and `"` for text and attribute values
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
