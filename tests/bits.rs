use super::*;

#[test]
fn genesis_target() {
    pretty_assert_eq!(
        CommandBuilder::new([
            "bits",
            "00000000ffff0000000000000000000000000000000000000000000000000000"
        ])
        .run_and_deserialize_output::<Value>(),
        json!({
            "bits": "1d00ffff",
            "target": "00000000ffff0000000000000000000000000000000000000000000000000000",
        })
    );
}

#[test]
fn round_trips_with_target() {
    for bits in ["1d00ffff", "1b0404cb", "1a0ffff0", "207fffff", "1703a30c"] {
        let output = CommandBuilder::new(["target", bits]).run_and_deserialize_output::<Value>();
        let target = output["target"].as_str().unwrap();

        let output = CommandBuilder::new(["bits", target]).run_and_deserialize_output::<Value>();
        pretty_assert_eq!(output["bits"], bits);
    }
}

#[test]
fn little_endian() {
    let output = CommandBuilder::new(["bits", "--little-endian", "5634120000"])
        .run_and_deserialize_output::<Value>();

    pretty_assert_eq!(output["bits"], "03123456");
}

#[test]
fn little_endian_wider_than_a_target() {
    pretty_assert_eq!(
        CommandBuilder::new([
            "bits".to_string(),
            "--little-endian".to_string(),
            format!("{}01", "00".repeat(32)),
        ])
        .run_and_deserialize_output::<Value>(),
        json!({ "bits": "21010000" })
    );
}

#[test]
fn zero_target() {
    CommandBuilder::new(["bits", &"0".repeat(64)])
        .expected_exit_code(1)
        .expected_stderr(format!(
            "error: failed to encode target {}\n\nbecause:\n- target is zero\n",
            "0".repeat(64)
        ))
        .run_and_extract_stdout();
}

#[test]
fn short_target() {
    CommandBuilder::new(["bits", "ffff"])
        .expected_exit_code(1)
        .run_and_extract_stdout();
}
