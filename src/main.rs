fn main() {
    if let Err(err) = rack_layout::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
