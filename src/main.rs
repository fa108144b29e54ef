mod spawner;

use nix::unistd::getpid;
use std::env;
use std::thread;

fn main() {
    // Parse command-line arguments.
    let args: Vec<String> = env::args().collect();
    let count = parse_count(args.get(1));

    println!("Parent PID: {} — creating {} zombie(s)", getpid(), count);

    let outcome = spawner::spawn_zombies(count);
    if outcome.failed > 0 {
        eprintln!(
            "warning: {} of {} fork(s) failed",
            outcome.failed, outcome.requested
        );
    }

    // Keep the parent alive so the zombies stay in the process table.
    thread::sleep(spawner::LINGER);
}

/// Parses the optional zombie count. An absent or non-numeric argument
/// falls back to 1.
fn parse_count(arg: Option<&String>) -> usize {
    arg.and_then(|s| s.parse::<usize>().ok()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::parse_count;

    #[test]
    fn missing_argument_defaults_to_one() {
        assert_eq!(parse_count(None), 1);
    }

    #[test]
    fn numeric_argument_is_used() {
        assert_eq!(parse_count(Some(&"3".to_string())), 3);
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(parse_count(Some(&"0".to_string())), 0);
    }

    #[test]
    fn non_numeric_argument_defaults_to_one() {
        assert_eq!(parse_count(Some(&"lots".to_string())), 1);
    }

    #[test]
    fn negative_argument_defaults_to_one() {
        assert_eq!(parse_count(Some(&"-3".to_string())), 1);
    }
}
