fn main() -> anyhow::Result<()> {
    env_logger::init();
    map_editor_store::run()
}
