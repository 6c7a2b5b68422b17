// Copyright 2024 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, Write};

use clap::Parser;
use fibo_methods::{Term, MAX_INDEX};

/// Prints one term of the sequence 1, 1, 2, 3, 5, ...
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Index of the term to print, counting from 1.
    #[arg(default_value_t = 6, value_parser = parse_index)]
    n: usize,

    /// Print the term as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_index(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("terms are indexed from 1".to_string()),
        Ok(n) if n > MAX_INDEX => Err(format!("index must be at most {MAX_INDEX}")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn render(term: &Term, json: bool) -> eyre::Result<String> {
    if json {
        Ok(serde_json::to_string(term)?)
    } else {
        Ok(term.value.to_string())
    }
}

fn write_term(out: &mut impl Write, term: &Term, json: bool) -> eyre::Result<()> {
    writeln!(out, "{}", render(term, json)?)?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    // Initialize logging. To see more, run with `RUST_LOG=debug cargo run`.
    env_logger::init();

    let args = Args::parse();
    let term = Term::at(args.n)?;
    log::info!("term {} is {}", term.index, term.value);

    write_term(&mut io::stdout().lock(), &term, args.json)
}
