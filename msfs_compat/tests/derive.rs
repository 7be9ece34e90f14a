#[test]
fn macros_expand() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
