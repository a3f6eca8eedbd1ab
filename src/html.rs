//! Static page renderer — turns a validated [`Playlist`] into an HTML
//! document with one card per track. Consumed only on a successful
//! compilation.

use url::form_urlencoded;

use crate::dsl::Playlist;

const SEARCH_ENGINE: &str = "https://www.google.com/search";

const STYLE: &str = "\
body {
    font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif;
    background-color: #f0f2f5;
    color: #1c1e21;
    margin: 0;
    padding: 20px;
}
.container {
    max-width: 900px;
    margin: 0 auto;
    background-color: #fff;
    border-radius: 8px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    padding: 20px;
}
h1 {
    color: #1877f2;
    border-bottom: 2px solid #ddd;
    padding-bottom: 10px;
}
.description {
    color: #606770;
    font-style: italic;
    margin-bottom: 20px;
}
.music-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 20px;
}
.music-card {
    background-color: #f9f9f9;
    border: 1px solid #ddd;
    border-radius: 8px;
    overflow: hidden;
    text-align: center;
    transition: transform 0.2s, box-shadow 0.2s;
}
.music-card:hover {
    transform: translateY(-5px);
    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15);
}
.music-card a {
    color: inherit;
    text-decoration: none;
}
.album-art {
    width: 100%;
    height: 200px;
    object-fit: cover;
    display: block;
}
.placeholder-art {
    width: 100%;
    height: 200px;
    background-color: #e0e0e0;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #999;
    font-size: 3em;
    font-weight: bold;
}
.music-info {
    padding: 10px;
}
.music-title {
    font-weight: bold;
    font-size: 1em;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}
.music-author {
    color: #606770;
    font-size: 0.9em;
}
";

/// Render the full HTML document for a validated playlist.
pub fn render_page(playlist: &Playlist) -> String {
    let title = escape(&playlist.name);

    let description = match &playlist.description {
        Some(text) if !text.is_empty() => {
            format!("        <p class=\"description\">{}</p>\n", escape(text))
        }
        _ => String::new(),
    };

    let cards: String = playlist
        .tracks
        .iter()
        .map(|track| {
            let art = match track.cover_reference.as_deref() {
                Some(reference) if !reference.is_empty() => format!(
                    "<img src=\"{}\" alt=\"Cover of {}\" class=\"album-art\">",
                    escape(reference),
                    escape(&track.title)
                ),
                _ => "<div class=\"placeholder-art\">?</div>".to_string(),
            };
            format!(
                "            <div class=\"music-card\">
                <a href=\"{href}\">
                {art}
                <div class=\"music-info\">
                    <div class=\"music-title\">{title}</div>
                    <div class=\"music-author\">{author}</div>
                </div>
                </a>
            </div>
",
                href = escape(&search_link(&track.author, &track.title)),
                art = art,
                title = escape(&track.title),
                author = escape(&track.author),
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>Playlist: {title}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class=\"container\">
        <h1>{title}</h1>
{description}        <div class=\"music-grid\">
{cards}        </div>
    </div>
</body>
</html>
"
    )
}

/// Build the external search link for a track: the query is the
/// URL-encoded string "<author> <title>".
fn search_link(author: &str, title: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &format!("{author} {title}"))
        .finish();
    format!("{SEARCH_ENGINE}?{query}")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::{AgeRating, Playlist, Track};

    fn sample_playlist() -> Playlist {
        Playlist::new(
            "Rock Classics".into(),
            120,
            "Rock".into(),
            2023,
            AgeRating::Unrestricted,
            Some("Classic & modern rock.".into()),
            vec![
                Track {
                    title: "Kashmir".into(),
                    author: "Led Zeppelin".into(),
                    duration_minutes: 8,
                    cover_reference: Some("https://example.com/kashmir.jpg".into()),
                },
                Track {
                    title: "Hotel California".into(),
                    author: "Eagles".into(),
                    duration_minutes: 6,
                    cover_reference: None,
                },
            ],
        )
    }

    #[test]
    fn page_embeds_playlist_name_in_title() {
        let page = render_page(&sample_playlist());
        assert!(page.contains("<title>Playlist: Rock Classics</title>"));
        assert!(page.contains("<h1>Rock Classics</h1>"));
    }

    #[test]
    fn page_contains_one_card_per_track() {
        let page = render_page(&sample_playlist());
        assert_eq!(page.matches("class=\"music-card\"").count(), 2);
        assert!(page.contains("Kashmir"));
        assert!(page.contains("Hotel California"));
    }

    #[test]
    fn cover_becomes_image_and_absence_becomes_placeholder() {
        let page = render_page(&sample_playlist());
        assert!(page.contains("src=\"https://example.com/kashmir.jpg\""));
        assert_eq!(page.matches("placeholder-art").count(), 2); // 1 card + 1 CSS rule
    }

    #[test]
    fn cards_link_to_encoded_search_queries() {
        let page = render_page(&sample_playlist());
        assert!(page.contains("https://www.google.com/search?q=Led+Zeppelin+Kashmir"));
        assert!(page.contains("q=Eagles+Hotel+California"));
    }

    #[test]
    fn description_paragraph_is_escaped_and_optional() {
        let page = render_page(&sample_playlist());
        assert!(page.contains("Classic &amp; modern rock."));

        let mut without = sample_playlist();
        without.description = None;
        assert!(!render_page(&without).contains("class=\"description\""));
    }

    #[test]
    fn html_special_characters_are_escaped() {
        let mut playlist = sample_playlist();
        playlist.name = "<script>\"Rock\"</script>".into();
        let page = render_page(&playlist);
        assert!(page.contains("&lt;script&gt;&quot;Rock&quot;&lt;/script&gt;"));
        assert!(!page.contains("<script>\"Rock\"</script>"));
    }
}
