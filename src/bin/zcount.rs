/*
 * zcount.rs - A handy routine for checking on the zombie maker
 *
 * usage: zcount <pid>
 * Prints the number of zombie children of <pid>.
 */

use std::env;
use std::process;
use sysinfo::{Pid, ProcessStatus, System};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <pid>", args[0]);
        process::exit(0);
    }

    let pid = args[1].parse::<u32>().unwrap_or_else(|_| {
        eprintln!("Error: <pid> must be a positive integer");
        process::exit(1);
    });

    let sys = System::new_all();
    let parent = Pid::from_u32(pid);
    let zombies = sys
        .processes()
        .values()
        .filter(|p| p.parent() == Some(parent) && p.status() == ProcessStatus::Zombie)
        .count();

    println!("{}", zombies);
}
