fn main() {
    flowutils::app::cli::run();
}
