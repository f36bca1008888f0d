use leetcode_cli_libs::leetcode::judge::{CaseReport, JudgeOutcome, UnknownReport};

/// ドライラン結果の表示。ケースごとの入出力を並べる。
pub fn render_run_outcome(outcome: &JudgeOutcome) {
    match outcome {
        JudgeOutcome::Accepted(report) => {
            println!("✅ Accepted");
            if let Some(elapsed) = report.elapsed_time_ms {
                println!("Elapsed: {} ms", elapsed);
            }
            println!();
            render_cases(&report.cases);
        }
        JudgeOutcome::WrongAnswer(report) => {
            println!("❌ Wrong Answer");
            println!(
                "Passed:   {}/{} cases",
                report.total_correct, report.total_testcases
            );
            println!();
            render_cases(&report.cases);
        }
        other => render_common(other),
    }
}

/// 採点付き提出結果の表示
pub fn render_submit_outcome(outcome: &JudgeOutcome) {
    match outcome {
        JudgeOutcome::Accepted(report) => {
            println!("✅ Accepted!");
            if let (Some(runtime), Some(percentile)) =
                (&report.runtime, report.runtime_percentile)
            {
                println!("Runtime: {} (Beats {:.2}%)", runtime, percentile);
            }
            if let (Some(memory), Some(percentile)) = (&report.memory, report.memory_percentile) {
                println!("Memory:  {} (Beats {:.2}%)", memory, percentile);
            }
        }
        JudgeOutcome::WrongAnswer(report) => {
            println!("❌ Wrong Answer");
            println!(
                "Passed:   {}/{} cases",
                report.total_correct, report.total_testcases
            );
            if let Some(case) = report.cases.first() {
                println!("Input:    {}", case.input);
                println!("Output:   {}", case.output);
                println!("Expected: {}", case.expected);
                if !case.stdout.is_empty() {
                    println!("Stdout:   {}", case.stdout);
                }
            }
        }
        other => render_common(other),
    }
}

fn render_common(outcome: &JudgeOutcome) {
    match outcome {
        JudgeOutcome::CompileError(diagnostic) => {
            println!("❌ Compile Error:");
            println!("{}", diagnostic);
        }
        JudgeOutcome::RuntimeError(diagnostic) => {
            println!("❌ Runtime Error:");
            println!("{}", diagnostic);
        }
        JudgeOutcome::TimedOut => {
            println!("⏰ Timed out waiting for the judge. Try again later.");
        }
        JudgeOutcome::Unknown(report) => render_unknown(report),
        // Accepted / WrongAnswer は呼び出し側で処理済み
        _ => {}
    }
}

fn render_unknown(report: &UnknownReport) {
    println!("Status: {}", report.status);
    println!(
        "Passed: {}/{} cases",
        report.total_correct, report.total_testcases
    );
    if let Some(input) = &report.last_input {
        println!("Last Input: {}", input);
    }
}

fn render_cases(cases: &[CaseReport]) {
    for (i, case) in cases.iter().enumerate() {
        println!("Case {}:", i + 1);
        if !case.input.is_empty() {
            println!("  Input:    {}", case.input);
        }
        println!("  Output:   {}", case.output);
        if !case.expected.is_empty() {
            println!("  Expected: {}", case.expected);
        }
        if !case.stdout.is_empty() {
            println!("  Stdout:   {}", case.stdout);
        }
        println!("  ------------------------");
    }
}
