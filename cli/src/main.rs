use mboot_runtime::ENTRY_MAIN;

fn main() {
    std::process::exit(mboot::run(ENTRY_MAIN));
}
