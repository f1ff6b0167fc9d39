//! Player transcript pages, annotated and raw.

use multizork_core::model::{TextType, TranscriptLine};

use crate::application::query_handlers::PlayerTranscriptView;

use super::page::{SiteConfig, close_document, escape_html, open_document};

/// Marker appended to the transcript of a crashed instance.
pub const CRASH_NOTICE: &str = "GAME INSTANCE CRASHED HERE";

/// Which of the two transcript pages is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Annotated,
    Raw,
}

fn open_transcript(site: &SiteConfig, view: &PlayerTranscriptView, mode: Mode) -> String {
    let owner = &view.owner;
    let hashid = escape_html(&owner.instance_hashid);
    let player_path = format!("{hashid}/{}", owner.player_id);

    let mut out = open_document(site, Some(&format!("player {}", owner.username)));
    out.push_str(&format!(
        "<p><h1>Transcript for player '{}'</h1></p>\n",
        escape_html(&owner.username)
    ));
    out.push_str(&format!(
        "<p>Details on this run of the game: <a href='{}'>[instance {hashid}]</a></p>\n",
        site.link(&format!("game/{hashid}"))
    ));
    let (other_path, other_label) = match mode {
        Mode::Annotated => ("rawplayer", "raw text"),
        Mode::Raw => ("player", "annotated"),
    };
    out.push_str(&format!(
        "<p>View this transcript as <a href='{}'>[{other_label}]</a></p>\n",
        site.link(&format!("{other_path}/{player_path}"))
    ));
    out
}

/// Splits the trailing prompt off a system message ending in `"\n>"`.
///
/// Returns the text to render in the line's own span and whether a separate
/// prompt span follows it.
fn split_prompt(line: &TranscriptLine) -> (&str, bool) {
    if line.texttype == TextType::SystemMessage {
        if let Some(body) = line.content.strip_suffix('>') {
            if body.ends_with('\n') {
                return (body, true);
            }
        }
    }
    (&line.content, false)
}

fn push_annotated_line(out: &mut String, line: &TranscriptLine) {
    let (body, prompt) = split_prompt(line);
    out.push_str(&format!(
        "<span class='{}'>{}</span>",
        line.texttype.css_class(),
        escape_html(body).replace('\n', "<br/>")
    ));
    if prompt {
        out.push_str("<span class='gameoutput'>></span>");
    }
}

/// Renders a transcript with one styled span per line.
#[must_use]
pub fn render_annotated_transcript(site: &SiteConfig, view: &PlayerTranscriptView) -> String {
    let mut out = open_transcript(site, view, Mode::Annotated);
    out.push_str("<div class='transcript'>\n");
    for line in &view.lines {
        push_annotated_line(&mut out, line);
    }
    out.push_str("\n</div>\n");
    if view.owner.crashed {
        out.push_str(&format!("<div class='crashed'>{CRASH_NOTICE}</div>\n"));
    }
    close_document(&mut out);
    out
}

/// Renders a transcript as the plain text the player's terminal received.
#[must_use]
pub fn render_raw_transcript(site: &SiteConfig, view: &PlayerTranscriptView) -> String {
    let mut out = open_transcript(site, view, Mode::Raw);
    out.push_str("<pre>\n");
    for line in &view.lines {
        out.push_str(&escape_html(&line.content));
    }
    if view.owner.crashed {
        out.push_str(&format!("\n*** {CRASH_NOTICE} ***\n"));
    }
    out.push_str("</pre>\n");
    close_document(&mut out);
    out
}
