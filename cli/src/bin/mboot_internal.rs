// Same launcher as `mboot`, with `__main` as the entry module
use mboot_runtime::ENTRY_INTERNAL;

fn main() {
    std::process::exit(mboot::run(ENTRY_INTERNAL));
}
