mod app;

fn main() -> Result<(), eframe::Error> {
    app::run()
}
