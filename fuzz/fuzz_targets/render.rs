#![no_main]
use libfuzzer_sys::fuzz_target;
use minijinja::UndefinedBehavior;

const DATA: &str = r#"{"a": 28, "b": [true, false, null, ["c"]], "d": {"e": 43.2, "f": [{}, 7, {"g": []}]}}"#;

fuzz_target!(|input: &str| {
    let root = jsontpl::decode(DATA).unwrap();
    for undefined in [UndefinedBehavior::Strict, UndefinedBehavior::Lenient] {
        let mut renderer = match jsontpl::Renderer::new(input, undefined) {
            Ok(renderer) => renderer,
            Err(_) => return,
        };
        renderer.set_fuel(Some(50000));
        renderer.execute(&root, std::io::sink()).ok();
    }
});
