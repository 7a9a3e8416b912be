fn main() {
    std::process::exit(scanlog::app::startup::startup());
}
