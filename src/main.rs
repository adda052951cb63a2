fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BNTF_DOCS_LOG", "warn"))
        .format_timestamp(None)
        .init();

    bntf_docs::app::cli::run();
}
