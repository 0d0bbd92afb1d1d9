use fontpreview::font::StyleFlags;
use fontpreview::{Config, DisplayMode, FontSource, PreviewModel, PreviewView, Signal};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("fontpreview {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let source = FontSource::from_name(&args[0], StyleFlags::empty(), 0);
    let text = args.get(1).map(String::as_str);
    if !run(&source, text) {
        std::process::exit(1);
    }
}

fn print_help() {
    println!("fontpreview {}", env!("CARGO_PKG_VERSION"));
    println!("Preview a font's sizes, coverage and shaped sample text\n");
    println!("USAGE:");
    println!("    fontpreview [OPTIONS] <FONT> [TEXT]\n");
    println!("ARGS:");
    println!("    <FONT>    Font file path, bare file name, or installed family name");
    println!("    [TEXT]    Preview text replacing the coverage-derived sample\n");
    println!("OPTIONS:");
    println!("    --print-config    Print the default configuration to stdout");
    println!("    --version, -V     Print version information");
    println!("    --help, -h        Print this help message");
}

/// Show `source` and print a summary. Returns the usable status.
fn run(source: &FontSource, text: Option<&str>) -> bool {
    let mut view = PreviewView::new(PreviewModel::new(Config::load()), DisplayMode::Blocks);
    view.set_preview_text(text);

    let usable = view
        .show_font(source)
        .contains(&Signal::Status(true));
    let model = view.model();
    let Some(state) = model.state().filter(|_| usable) else {
        match model.last_error() {
            Some(e) => eprintln!("error: {e}"),
            None => eprintln!("error: {source} cannot be previewed"),
        }
        return false;
    };

    println!("{}", state.label);
    println!("sizes:  {:?}", state.sizes.as_slice());
    println!("body:   {}px", state.body_px);
    println!("sample: {}", state.sample);
    for sized in &state.sample_runs {
        let glyphs: usize = sized.runs.iter().map(|r| r.glyphs.len()).sum();
        let width = sized.runs.last().map_or(0.0, |r| r.end_x());
        println!(
            "  {:>4}px  {} runs  {glyphs} glyphs  {width:.1}px wide",
            sized.size_px,
            sized.runs.len()
        );
    }
    println!("laid out {} glyphs", view.layout().len());
    true
}
