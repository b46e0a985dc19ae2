//! End-to-end integration tests
//!
//! These tests drive the complete split pipeline: write an export CSV
//! into a temp directory, run the split, and inspect the per-account
//! files that come out. They cover:
//! - The happy path with multiple accounts and the description fallback
//! - Round-trip row counts across all output files
//! - Fatal validation (bad dates) leaving no output behind
//! - The no-overwrite policy
//! - Collect mode reporting every bad row at once
//! - Interactive argument resolution with an in-memory console

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use statement_splitter::cli::{Console, ErrorMode};
    use statement_splitter::core::{split, SplitOptions};
    use statement_splitter::types::SplitError;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    const HEADER: &str = "Account,Date,Description,Original Description,Amount\n";

    /// Write an export fixture and create an empty output directory
    fn setup(content: &str) -> (TempDir, PathBuf, PathBuf) {
        let dir = tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("export.csv");
        fs::write(&input, content).expect("Failed to write export fixture");
        let out = dir.path().join("out");
        fs::create_dir(&out).expect("Failed to create output dir");
        (dir, input, out)
    }

    fn run_split(input: &Path, out: &Path) -> Result<(), SplitError> {
        let mut progress = Vec::new();
        split(input, out, &SplitOptions::default(), &mut progress).map(|_| ())
    }

    #[test]
    fn test_scenario_two_accounts_with_fallback() {
        let content = format!(
            "{HEADER}\
             Checking,01/01/2020,Coffee,,-3.50\n\
             Checking,05/01/2020,,Salary,2000.00\n\
             Savings,10/01/2020,Interest,,0.01\n"
        );
        let (_dir, input, out) = setup(&content);

        run_split(&input, &out).unwrap();

        let checking = fs::read_to_string(out.join("Checking_2020-01-01_to_2020-01-05.csv"))
            .expect("Checking output file missing");
        assert_eq!(
            checking,
            "Date,Payee,Memo,Amount\n\
             2020-01-01,Coffee,,-3.50\n\
             2020-01-05,Salary,,2000.00\n"
        );

        let savings = fs::read_to_string(out.join("Savings_2020-01-10_to_2020-01-10.csv"))
            .expect("Savings output file missing");
        assert_eq!(
            savings,
            "Date,Payee,Memo,Amount\n2020-01-10,Interest,,0.01\n"
        );

        assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
    }

    #[rstest]
    #[case::single_account(&[("A", "01/01/2020"), ("A", "02/01/2020")], 1)]
    #[case::interleaved(&[("A", "01/01/2020"), ("B", "02/01/2020"), ("A", "03/01/2020"), ("C", "04/01/2020")], 3)]
    #[case::one_row_each(&[("A", "01/01/2020"), ("B", "02/01/2020")], 2)]
    fn test_row_counts_round_trip(#[case] rows: &[(&str, &str)], #[case] expected_files: usize) {
        let mut content = HEADER.to_string();
        for (account, date) in rows {
            content.push_str(&format!("{account},{date},txn,,1.00\n"));
        }
        let (_dir, input, out) = setup(&content);

        let mut progress = Vec::new();
        let summary = split(&input, &out, &SplitOptions::default(), &mut progress).unwrap();

        assert_eq!(summary.total_rows, rows.len());
        assert_eq!(summary.groups.len(), expected_files);

        // Sum of data rows across all output files equals the input rows
        let mut written = 0;
        for entry in fs::read_dir(&out).unwrap() {
            let text = fs::read_to_string(entry.unwrap().path()).unwrap();
            written += text.lines().count() - 1; // minus header
        }
        assert_eq!(written, rows.len());
    }

    #[test]
    fn test_output_rows_match_their_files_account() {
        let content = format!(
            "{HEADER}\
             A,01/01/2020,from A,,1.00\n\
             B,02/01/2020,from B,,2.00\n\
             A,03/01/2020,also from A,,3.00\n"
        );
        let (_dir, input, out) = setup(&content);

        run_split(&input, &out).unwrap();

        let a = fs::read_to_string(out.join("A_2020-01-01_to_2020-01-03.csv")).unwrap();
        assert!(a.contains("from A"));
        assert!(a.contains("also from A"));
        assert!(!a.contains("from B"));

        let b = fs::read_to_string(out.join("B_2020-01-02_to_2020-01-02.csv")).unwrap();
        assert!(b.contains("from B"));
        assert!(!b.contains("from A"));
    }

    #[test]
    fn test_blank_lines_in_export_are_ignored() {
        let content = format!(
            "{HEADER}\nA,01/01/2020,x,,1.00\n\n\nA,02/01/2020,y,,2.00\n\n"
        );
        let (_dir, input, out) = setup(&content);

        let mut progress = Vec::new();
        let summary = split(&input, &out, &SplitOptions::default(), &mut progress).unwrap();
        assert_eq!(summary.total_rows, 2);
    }

    #[test]
    fn test_invalid_date_aborts_with_no_output_for_any_group() {
        let content = format!(
            "{HEADER}\
             A,01/01/2020,fine,,1.00\n\
             B,2020-13-40,broken,,2.00\n"
        );
        let (_dir, input, out) = setup(&content);

        let result = run_split(&input, &out);

        assert!(matches!(result, Err(SplitError::InvalidDate { .. })));
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_destination_aborts_without_modifying_it() {
        let content = format!("{HEADER}A,01/01/2020,x,,1.00\n");
        let (_dir, input, out) = setup(&content);
        let existing = out.join("A_2020-01-01_to_2020-01-01.csv");
        fs::write(&existing, "previous run").unwrap();

        let result = run_split(&input, &out);

        assert!(matches!(result, Err(SplitError::OutputCollision { .. })));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "previous run");
    }

    #[test]
    fn test_collect_mode_reports_every_bad_row() {
        let content = format!(
            "{HEADER}\
             A,nope,x,,1.00\n\
             A,02/01/2020,y,,2.00\n\
             A,03/01/2020,z,,lots\n"
        );
        let (_dir, input, out) = setup(&content);

        let options = SplitOptions {
            error_mode: ErrorMode::Collect,
            ..SplitOptions::default()
        };
        let mut progress = Vec::new();
        let result = split(&input, &out, &options, &mut progress);

        let message = result.unwrap_err().to_string();
        assert!(message.starts_with("2 invalid row(s):"));
        assert!(message.contains("'nope'"));
        assert!(message.contains("'lots'"));
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_interactive_resolution_feeds_the_pipeline() {
        let content = format!("{HEADER}A,01/01/2020,x,,1.00\n");
        let (_dir, input, out) = setup(&content);

        // First answer: blank (re-prompt), second: the input path,
        // third: the output directory
        let answers = format!("\n{}\n{}\n", input.display(), out.display());
        let mut console = Console::new(Cursor::new(answers.into_bytes()), Vec::new());

        let resolved_input =
            statement_splitter::cli::resolve_input_path(None, &mut console).unwrap();
        let resolved_out =
            statement_splitter::cli::resolve_output_dir(None, &resolved_input, &mut console)
                .unwrap();

        assert_eq!(resolved_input, input);
        assert_eq!(resolved_out, out);

        run_split(&resolved_input, &resolved_out).unwrap();
        assert_eq!(fs::read_dir(&out).unwrap().count(), 1);
    }

    #[test]
    fn test_amount_precision_survives_the_round_trip() {
        let content = format!(
            "{HEADER}\
             A,01/01/2020,a,,-0.10\n\
             A,02/01/2020,b,,1234.5678\n\
             A,03/01/2020,c,,2000.00\n"
        );
        let (_dir, input, out) = setup(&content);

        run_split(&input, &out).unwrap();

        let text = fs::read_to_string(out.join("A_2020-01-01_to_2020-01-03.csv")).unwrap();
        assert!(text.contains(",-0.10\n"));
        assert!(text.contains(",1234.5678\n"));
        assert!(text.contains(",2000.00\n"));
    }
}
