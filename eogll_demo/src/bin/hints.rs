//! Prints the default window hints, then hints with every flag set

use eogll::WindowHints;

fn print_hints(label: &str, hints: &WindowHints) {
    println!("{label}:");
    println!("  resizable:   {}", hints.resizable());
    println!("  decorated:   {}", hints.decorated());
    println!("  floating:    {}", hints.floating());
    println!("  maximized:   {}", hints.maximized());
    println!("  visible:     {}", hints.visible());
    println!("  focused:     {}", hints.focused());
    println!("  transparent: {}", hints.transparent());
}

fn main() {
    println!("{}", eogll::Eogll::version_string());
    print_hints("default", &WindowHints::default());
    print_hints(
        "explicit",
        &WindowHints::new(true, true, true, true, true, true, true),
    );
}
