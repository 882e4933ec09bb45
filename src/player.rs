//! Static HLS player page. The stream URL lands in a single-quoted script
//! string, so it is escaped for that context before interpolation.

const PLAYER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Video Player</title>
    <script src="https://cdn.jsdelivr.net/npm/hls.js@latest"></script>
    <style>
        .container {
            max-width: 800px;
            margin: 20px auto;
            text-align: center;
        }
        video {
            width: 100%;
            margin: 20px 0;
        }
        #playButton {
            padding: 10px 20px;
            font-size: 16px;
            cursor: pointer;
            background-color: #4CAF50;
            color: white;
            border: none;
            border-radius: 4px;
            margin-bottom: 20px;
        }
        #playButton:hover {
            background-color: #45a049;
        }
    </style>
</head>
<body>
    <div class="container">
        <button id="playButton">Click to Play Video</button>
        <video id="video" controls playsinline></video>
    </div>
    <script>
        document.addEventListener('DOMContentLoaded', function() {
            var video = document.getElementById('video');
            var playButton = document.getElementById('playButton');
            var videoSrc = '{hls_url}';
            var hls;

            if (Hls.isSupported()) {
                hls = new Hls();
                hls.loadSource(videoSrc);
                hls.attachMedia(video);
            } else if (video.canPlayType('application/vnd.apple.mpegurl')) {
                video.src = videoSrc;
            }

            playButton.addEventListener('click', function() {
                video.play()
                    .then(() => {
                        console.log('Playback started');
                        playButton.style.display = 'none';
                    })
                    .catch(e => console.error('Playback failed:', e));
            });
        });
    </script>
</body>
</html>
"#;

/// Render the player page for the given stream URL.
pub fn render_player(hls_url: &str) -> String {
    PLAYER_TEMPLATE.replace("{hls_url}", &escape_js_string(hls_url))
}

/// Escape a value for a single-quoted script string. `<` and `>` are hex
/// escaped so a value containing `</script>` cannot terminate the block.
pub fn escape_js_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '<' => escaped.push_str("\\x3C"),
            '>' => escaped.push_str("\\x3E"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM_URL: &str = "https://example.com/stream.m3u8";

    #[test]
    fn test_url_lands_in_script_assignment() {
        let html = render_player(STREAM_URL);
        assert!(html.contains(&format!("var videoSrc = '{}';", STREAM_URL)));
    }

    #[test]
    fn test_no_autoplay() {
        let html = render_player(STREAM_URL);
        assert!(!html.contains("autoplay"));
        assert!(html.contains("<video id=\"video\" controls playsinline></video>"));
    }

    #[test]
    fn test_playback_requires_click() {
        let html = render_player(STREAM_URL);
        assert!(html.contains("playButton.addEventListener('click'"));
        assert!(html.contains("video.play()"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render_player(STREAM_URL), render_player(STREAM_URL));
    }

    #[test]
    fn test_escape_quotes_and_backslashes() {
        assert_eq!(escape_js_string(r"a\b"), r"a\\b");
        assert_eq!(escape_js_string("it's"), r"it\'s");
        assert_eq!(escape_js_string("say \"hi\""), r#"say \"hi\""#);
        assert_eq!(escape_js_string("a\nb\rc"), r"a\nb\rc");
    }

    #[test]
    fn test_escape_blocks_script_breakout() {
        let html = render_player("https://example.com/'</script><script>alert(1)</script>");
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r"\'\x3C/script\x3E"));
    }
}
