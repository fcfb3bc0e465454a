fn main() -> anyhow::Result<()> {
    chat_store_explorer::cli::run()
}
