use dfslib::ClientConfig;
use std::env;
use std::process;
use std::time::Duration;

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    #[allow(dead_code)] // Only some demos take boolean flags.
    pub fn take_flag(&mut self, names: &[&str]) -> bool {
        match self.args.iter().position(|a| names.contains(&a.as_str())) {
            Some(i) => {
                self.args.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

/// Server settings from `--server`, `--proxy` and `--timeout`, falling back
/// to the `DFS_*` environment variables.
pub fn parse_config(parser: &mut ArgParser) -> dfslib::Result<ClientConfig> {
    let mut config = match parser.take_value(&["--server", "-s"]) {
        Some(server) => ClientConfig::from_env_with_server(&server)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(proxy) = parser.take_value(&["--proxy"]) {
        config = config.with_proxy(proxy);
    }
    if let Some(secs) = parser.take_value(&["--timeout"]) {
        let secs: u64 = secs.parse().unwrap_or_else(|_| usage_and_exit(parser.usage));
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}
