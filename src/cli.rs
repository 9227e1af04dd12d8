// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print JSON").action(ArgAction::SetTrue))
        .arg(
            arg!(--jsonl "Print one JSON object per line")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

fn confirm_flag(cmd: Command) -> Command {
    cmd.arg(arg!(-y --yes "Confirm the deletion").action(ArgAction::SetTrue))
}

fn kind_arg(required: bool) -> Arg {
    Arg::new("type")
        .long("type")
        .value_name("TYPE")
        .value_parser(["income", "expense"])
        .required(required)
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .about("Track income and expenses, with category, cash-flow and calendar summaries")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .env(crate::config::DB_ENV)
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("SQLite file holding the data slots"),
        )
        .arg(
            Arg::new("notify_ms")
                .long("notify-ms")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .global(true)
                .hide(true),
        )
        .arg(
            arg!(-v --verbose "Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("init").about("Create the database and print its location"))
        .subcommand(
            Command::new("login")
                .about("Start a session")
                .arg(arg!(--email <EMAIL>).required(true))
                .arg(arg!(--password <PASSWORD>).required(true))
                .arg(arg!(--name <NAME>).required(false))
                .arg(
                    Arg::new("sign_up")
                        .long("sign-up")
                        .action(ArgAction::SetTrue)
                        .help("Create an account (name required)"),
                ),
        )
        .subcommand(Command::new("logout").about("End the session"))
        .subcommand(Command::new("whoami").about("Show the logged-in user"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--description <TEXT>).required(true))
                        .arg(
                            arg!(--amount <AMOUNT> "Positive amount; sign follows --type")
                                .required(true)
                                .allow_negative_numbers(true),
                        )
                        .arg(kind_arg(true))
                        .arg(arg!(--category <NAME>).required(false)),
                )
                .subcommand(json_flags(
                    Command::new("list").arg(
                        arg!(--limit <N>)
                            .required(false)
                            .value_parser(value_parser!(usize)),
                    ),
                ))
                .subcommand(
                    Command::new("edit")
                        .arg(arg!(<id>))
                        .arg(arg!(--description <TEXT>).required(false))
                        .arg(
                            arg!(--amount <AMOUNT>)
                                .required(false)
                                .allow_negative_numbers(true),
                        )
                        .arg(kind_arg(false))
                        .arg(arg!(--category <NAME>).required(false))
                        .arg(arg!(--date <DATE>).required(false)),
                )
                .subcommand(Command::new("rm").arg(arg!(<id>)))
                .subcommand(confirm_flag(
                    Command::new("clear").about("Delete every transaction"),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .arg(arg!(--name <NAME>).required(true))
                        .arg(kind_arg(true))
                        .arg(arg!(--color <HEX>).required(false)),
                )
                .subcommand(json_flags(Command::new("list").arg(kind_arg(false))))
                .subcommand(
                    Command::new("edit")
                        .arg(arg!(<id>))
                        .arg(arg!(--name <NAME>).required(false))
                        .arg(kind_arg(false))
                        .arg(arg!(--color <HEX>).required(false)),
                )
                .subcommand(confirm_flag(Command::new("rm").arg(arg!(<id>)))),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries")
                .subcommand_required(true)
                .subcommand(json_flags(Command::new("summary")))
                .subcommand(json_flags(Command::new("categories")))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .arg(arg!(--monthly "Bucket by month").action(ArgAction::SetTrue)),
                ))
                .subcommand(json_flags(
                    Command::new("calendar").arg(arg!(--month <MONTH> "YYYY-MM").required(false)),
                ))
                .subcommand(json_flags(
                    Command::new("day").arg(arg!(--date <DATE>).required(true)),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write all transactions to a file")
                .arg(
                    arg!(--format <FORMAT>)
                        .required(false)
                        .default_value("csv"),
                )
                .arg(arg!(--out <PATH>).required(false)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn global_db_flag_after_subcommand() {
        let m = build_cli().get_matches_from(["finboard", "report", "summary", "--db", "x.sqlite"]);
        assert_eq!(
            m.get_one::<PathBuf>("db").map(|p| p.to_string_lossy().to_string()),
            Some("x.sqlite".into())
        );
    }
}
