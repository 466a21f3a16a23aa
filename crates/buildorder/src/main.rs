fn main() -> anyhow::Result<()> {
    buildorder_lib::main()
}
