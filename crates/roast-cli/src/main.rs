fn main() -> anyhow::Result<()> {
    roast_cli_lib::run()
}
