use fila::{QuestionDetails, QuestionResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in ANSI codes when color output is on.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("{code}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_run(res: &QuestionResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;

    println!("\n{}", palette.bold(palette.paint(format!("?  Question: \"{}\"", res.result.question), ansi::CYAN)));
    println!("   {}", palette.dim(format!("at {}", details.reference_time.format("%Y-%m-%d %H:%M:%S"))));

    println!("\n{}", palette.paint("━━━ Features ━━━", ansi::GRAY));
    print_features(details, &palette);

    println!("\n{}", palette.paint("━━━ Answers ━━━", ansi::GRAY));
    for answer in &res.result.answers {
        if answer.is_tip {
            println!("  {} {}", palette.paint("tip", ansi::YELLOW), answer.message);
        } else {
            println!("  {} {}", palette.paint("  •", ansi::GREEN), answer.message);
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Extraction: {}  │  Evaluation: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.extraction), ansi::CYAN),
        palette.dim(format!("{:?}", details.evaluation)),
    );
    println!();
}

fn print_features(details: &QuestionDetails, palette: &ansi::Palette) {
    if details.keywords.is_empty() {
        println!("{}", palette.dim("  No keywords matched"));
        println!("\n{}", palette.dim("  Tip: set RUST_LOG=fila=debug to trace extraction"));
        return;
    }

    for feature in &details.features {
        let words: Vec<&str> =
            details.keywords.iter().filter(|k| &k.feature == feature).map(|k| k.word.as_str()).collect();
        let order = details.keywords.iter().find(|k| &k.feature == feature).map(|k| k.order).unwrap_or_default();

        let name = if feature.is_supported() {
            palette.paint(feature.name(), ansi::BLUE)
        } else {
            palette.dim(format!("{} (unsupported)", feature.name()))
        };
        println!("  {} {}  {}", palette.dim(format!("[{order}]")), name, palette.dim(words.join(", ")));
    }

    if details.fallback {
        println!("\n{}", palette.paint("  No supported feature: default answer returned", ansi::YELLOW));
    }
}
