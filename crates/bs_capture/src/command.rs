use bs_app::RectI32;

/// `screen://` input understood by VLC's screen-capture module.
pub const SCREEN_MRL: &str = "screen://";

/// Builds the argument list for a screen-capture process cropped to a region.
#[derive(Debug, Clone)]
pub struct CaptureCommandBuilder {
    program: String,
    region: RectI32,
    fps: u32,
}

impl CaptureCommandBuilder {
    pub fn new(region: RectI32) -> Self {
        Self {
            program: "vlc".to_string(),
            region,
            fps: 30,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Geometry is passed through as-is; width/height are `x2-x1` and `y2-y1`.
    pub fn build(&self) -> CaptureCommand {
        let r = self.region;
        let args = vec![
            "--no-video-deco".to_string(),
            "--no-embedded-video".to_string(),
            format!("--screen-fps={}", self.fps),
            format!("--screen-top={}", r.top),
            format!("--screen-left={}", r.left),
            format!("--screen-width={}", r.width()),
            format!("--screen-height={}", r.height()),
            SCREEN_MRL.to_string(),
        ];

        CaptureCommand {
            program: self.program.clone(),
            args,
            region: r,
        }
    }
}

/// A fully built capture invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureCommand {
    pub program: String,
    pub args: Vec<String>,
    pub region: RectI32,
}

impl CaptureCommand {
    /// Human-readable command line (for logs and `--dry-run`).
    pub fn command_line(&self) -> String {
        let mut line = quote(&self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&quote(arg));
        }
        line
    }
}

fn quote(s: &str) -> String {
    if s.contains(char::is_whitespace) {
        format!("\"{s}\"")
    } else {
        s.to_string()
    }
}
