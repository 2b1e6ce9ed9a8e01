use librawfont::to_raw_bytes;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!(
            "Usage: {} <INPUT_FILE> <OUTPUT_FILE>\n\
             Example: {} consolas_10x25.txt font_10x25.raw",
            args[0], args[0],
        );
        std::process::exit(1);
    }

    let text = fs::read_to_string(&args[1])?;
    match to_raw_bytes(&text) {
        Ok(bytes) => {
            fs::write(&args[2], &bytes)?;
            println!("Packed {} bytes into '{}'.", bytes.len(), args[2]);
        }
        Err(e) => {
            eprintln!("Error packing '{}': {e}", args[1]);
            std::process::exit(1);
        }
    }

    Ok(())
}
