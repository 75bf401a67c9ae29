#![no_main]
use libfuzzer_sys::fuzz_target;
use minijinja::UndefinedBehavior;

fuzz_target!(|input: &str| {
    jsontpl::render("{{ this|tojson }}", input, UndefinedBehavior::Strict, std::io::sink()).ok();
});
