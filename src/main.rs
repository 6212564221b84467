fn main() {
    msx::term::main()
}
