//! Instance summary page.

use crate::application::query_handlers::InstanceSummaryView;

use super::page::{SiteConfig, close_document, escape_html, format_timestamp, open_document};

/// Renders the summary page of one game instance.
#[must_use]
pub fn render_instance(site: &SiteConfig, view: &InstanceSummaryView) -> String {
    let instance = &view.instance;
    let hashid = escape_html(&instance.hashid);

    let mut out = open_document(site, Some(&format!("game {}", instance.hashid)));
    out.push_str(&format!("<p><h1>Game instance '{hashid}'</h1></p>\n"));
    out.push_str("<p><ul>\n");
    out.push_str(&format!(
        "<li>story file: '{}'</li>\n",
        escape_html(&instance.story_filename)
    ));
    out.push_str(&format!(
        "<li>number of players: {}</li>\n",
        instance.num_players
    ));
    out.push_str(&format!(
        "<li>started: {}</li>\n",
        format_timestamp(instance.starttime)
    ));
    out.push_str(&format!(
        "<li>last saved: {}</li>\n",
        format_timestamp(instance.savetime)
    ));
    out.push_str(&format!(
        "<li>Z-Machine instructions run: {}</li>\n",
        instance.instructions_run
    ));
    out.push_str(&format!(
        "<li>crashed: {}</li>\n",
        if instance.crashed { "yes" } else { "no" }
    ));
    if let Some(crash) = &view.crash {
        out.push_str(&format!(
            "<li>crash report: {}: {}</li>\n",
            format_timestamp(crash.timestamp),
            escape_html(&crash.errstr)
        ));
    }

    out.push_str("<li>Transcripts available for players:");
    if view.players.is_empty() {
        out.push_str(" (no transcripts found!?)");
    } else {
        out.push_str(" [");
        for (index, player) in view.players.iter().enumerate() {
            if index > 0 {
                out.push_str(" | ");
            }
            let href = site.link(&format!("player/{hashid}/{}", player.id));
            out.push_str(&format!(
                "<a href='{href}'>{}</a>",
                escape_html(&player.username)
            ));
        }
        out.push(']');
    }
    out.push_str("</li>\n</ul></p>\n");

    close_document(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use multizork_core::model::{CrashReport, Instance, Player};

    use super::*;

    fn instance(crashed: bool) -> Instance {
        Instance {
            id: 1,
            hashid: "AB12".to_owned(),
            story_filename: "zork1.dat".to_owned(),
            num_players: 2,
            starttime: 1_768_471_200,
            savetime: 1_768_476_600,
            instructions_run: 123_456,
            crashed,
        }
    }

    fn player(id: i64, username: &str) -> Player {
        Player {
            id,
            instance: 1,
            username: username.to_owned(),
        }
    }

    #[test]
    fn test_render_instance_lists_instance_details() {
        // Arrange
        let view = InstanceSummaryView {
            instance: instance(false),
            players: vec![player(1, "alice")],
            crash: None,
        };

        // Act
        let page = render_instance(&SiteConfig::default(), &view);

        // Assert
        assert!(page.contains("<title>multizork - game AB12</title>"));
        assert!(page.contains("<h1>Game instance 'AB12'</h1>"));
        assert!(page.contains("<li>story file: 'zork1.dat'</li>"));
        assert!(page.contains("<li>number of players: 2</li>"));
        assert!(page.contains("<li>started: 01/15/26 10:00:00 UTC</li>"));
        assert!(page.contains("<li>last saved: 01/15/26 11:30:00 UTC</li>"));
        assert!(page.contains("<li>Z-Machine instructions run: 123456</li>"));
        assert!(page.contains("<li>crashed: no</li>"));
        assert!(!page.contains("crash report"));
    }

    #[test]
    fn test_render_instance_joins_player_links_with_separators() {
        let view = InstanceSummaryView {
            instance: instance(false),
            players: vec![player(1, "alice"), player(2, "bob"), player(3, "carol")],
            crash: None,
        };

        let page = render_instance(&SiteConfig::new("/zork", "multizork"), &view);

        assert!(page.contains(
            " [<a href='/zork/player/AB12/1'>alice</a> | \
             <a href='/zork/player/AB12/2'>bob</a> | \
             <a href='/zork/player/AB12/3'>carol</a>]</li>"
        ));
    }

    #[test]
    fn test_render_instance_shows_placeholder_without_players() {
        let view = InstanceSummaryView {
            instance: instance(false),
            players: vec![],
            crash: None,
        };

        let page = render_instance(&SiteConfig::default(), &view);

        assert!(page.contains("Transcripts available for players: (no transcripts found!?)</li>"));
    }

    #[test]
    fn test_render_instance_escapes_stored_text() {
        let mut crashed = instance(true);
        crashed.story_filename = "<zork>.dat".to_owned();
        let view = InstanceSummaryView {
            instance: crashed,
            players: vec![player(1, "<script>alert(1)</script>")],
            crash: Some(CrashReport {
                timestamp: 1_768_480_000,
                errstr: "bad opcode <0xBE>".to_owned(),
            }),
        };

        let page = render_instance(&SiteConfig::default(), &view);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("<li>story file: '&lt;zork&gt;.dat'</li>"));
        assert!(page.contains("<li>crashed: yes</li>"));
        assert!(page.contains("<li>crash report: 01/15/26 12:26:40 UTC: bad opcode &lt;0xBE&gt;</li>"));
    }
}
