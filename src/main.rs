fn main() {
    if let Err(err) = rw_3agent_lite::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
