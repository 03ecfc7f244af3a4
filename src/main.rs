fn main() {
    freecell_engine::run();
}
