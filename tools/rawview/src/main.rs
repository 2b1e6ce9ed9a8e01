use librawfont::render_raw_file;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!(
            "Usage: {} <RAW_FILE>\n\
             Example: {} fonts/font_10x25.raw",
            args[0], args[0],
        );
        std::process::exit(1);
    }

    match render_raw_file(&args[1]) {
        Ok(grid) => println!("{grid}"),
        Err(e) => {
            eprintln!("Error rendering '{}': {e}", args[1]);
            std::process::exit(1);
        }
    }
}
