fn main() -> anyhow::Result<()> {
    relfol::command_line::procedures::main()
}
