/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Song manifest with a mix of playable, placeholder and video-less entries
#[allow(dead_code)]
pub const SONGS_TXT: &str = "\
BLACK SHOUT|https://www.youtube.com/watch?v=dQw4w9WgXcQ
LOUDER|https://youtu.be/9bZkp7q19f0
Neo-Aspect|https://www.youtube.com/embed/kJQP7kiw5Fk
Opera of the wasteland|https://www.youtube.com/watch?v=example
FIRE BIRD|
R|https://www.youtube.com/v/OPf0YbXqDm0
Hidden Track|
";
