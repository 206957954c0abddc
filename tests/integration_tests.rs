//! End-to-end tests of the command-line binary.

use assert_cmd::Command;
use predicates::prelude::*;

use locale_cal::args::TEST_TIME_VAR;

fn cal(locale: &str) -> Command {
    let mut cmd = Command::cargo_bin("locale-cal").unwrap();
    cmd.env_remove("LC_TIME")
        .env_remove("LANG")
        .env_remove("RUST_LOG")
        .env("LC_ALL", locale)
        .env(TEST_TIME_VAR, "2024-03-15");
    cmd
}

mod output {
    use super::*;

    #[test]
    fn february_2014() {
        let expected = concat!(
            " Sun Mon Tue Wed Thu Fri Sat\n",
            "                          1\n",
            "  2   3   4   5   6   7   8\n",
            "  9  10  11  12  13  14  15\n",
            " 16  17  18  19  20  21  22\n",
            " 23  24  25  26  27  28\n",
            "\n",
        );
        cal("C")
            .arg("02.2014")
            .assert()
            .success()
            .stdout(expected)
            .stderr("");
    }

    #[test]
    fn september_1752_skips_eleven_days() {
        cal("C")
            .arg("09.1752")
            .assert()
            .success()
            .stdout(predicate::str::contains("          1   2  14  15  16\n"))
            .stdout(predicate::str::contains(" 3 ").not());
    }

    #[test]
    fn current_month_brackets_today() {
        cal("C")
            .assert()
            .success()
            .stdout(predicate::str::contains(" 10  11  12  13  14 [15] 16\n"));
    }

    #[test]
    fn explicit_current_month_brackets_today() {
        cal("C")
            .arg("3.2024")
            .assert()
            .success()
            .stdout(predicate::str::contains("[15]"));
    }

    #[test]
    fn other_month_has_no_brackets() {
        cal("C")
            .arg("03.2099")
            .assert()
            .success()
            .stdout(predicate::str::contains("[").not())
            .stdout(predicate::str::contains("]").not());
    }

    #[test]
    fn us_locale_starts_on_sunday() {
        cal("en_US.UTF-8")
            .arg("02.2014")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(" Sun Mon Tue"));
    }

    #[test]
    fn german_locale_starts_on_monday() {
        cal("de_DE.UTF-8")
            .arg("02.2014")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(" Mo  Di  Mi  Do  Fr  Sa  So\n"))
            .stdout(predicate::str::contains(
                "\n                      1   2\n",
            ));
    }

    #[test]
    fn egyptian_locale_starts_on_saturday() {
        cal("ar_EG.UTF-8")
            .arg("02.2014")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "\n  1   2   3   4   5   6   7\n",
            ));
    }

    #[test]
    fn unknown_locale_starts_on_sunday() {
        cal("zz_QQ.UTF-8")
            .arg("02.2014")
            .assert()
            .success()
            .stdout(predicate::str::starts_with(" Sun Mon Tue Wed Thu Fri Sat\n"));
    }
}

mod errors {
    use super::*;

    fn fails_with(args: &[&str], message: &str) {
        cal("C")
            .args(args)
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(format!("Error: {message}\n"));
    }

    const USAGE: &str =
        "for usage locale-cal month.year (example: locale-cal 02.2014 for feb 2014)";

    #[test]
    fn month_zero() {
        fails_with(&["0.2014"], "incorrect format of the month");
    }

    #[test]
    fn negative_month() {
        fails_with(&["-1.2014"], "incorrect format of the month");
    }

    #[test]
    fn month_thirteen() {
        fails_with(&["13.2014"], "incorrect format of the month");
    }

    #[test]
    fn year_zero() {
        fails_with(&["1.0"], "incorrect format of the year");
    }

    #[test]
    fn year_9999() {
        fails_with(&["1.9999"], "incorrect format of the year");
    }

    #[test]
    fn token_without_dot() {
        fails_with(&["2014"], USAGE);
    }

    #[test]
    fn two_tokens() {
        fails_with(&["02.2014", "03.2014"], USAGE);
    }

    #[test]
    fn non_numeric_month() {
        fails_with(&["feb.2014"], "incorrect format of the month");
    }

    #[test]
    fn help_succeeds() {
        cal("C")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("month.year"));
    }
}
