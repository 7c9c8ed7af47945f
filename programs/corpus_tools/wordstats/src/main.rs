use std::io::BufWriter;
use std::path::Path;
use term_macros::*;
use wordstats::{analyze_file, ReportFormat, Settings, TieBreak, DEFAULT_MIN_LENGTH, DEFAULT_TOP_N};

fn main() {
    tool! {
        args:
            - path: String = "sample.txt".to_string();
            - min_length: usize = DEFAULT_MIN_LENGTH;
                ? min_length == 0
                => "has to be at least 1"
            - top_n: usize = DEFAULT_TOP_N;
            - tie_break: TieBreak = TieBreak::FirstSeen;
            - format: ReportFormat = ReportFormat::Text;
        ;

        body: || {
            let settings = Settings { min_length, top_n, tie_break, format };
            debug!("{:?}", settings);
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            if let Err(e) = analyze_file(Path::new(&path), &settings, &mut out) {
                fail(e);
            }
        }
    };
}
