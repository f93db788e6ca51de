fn main() {
    vinaprep::app::cli::run();
}
