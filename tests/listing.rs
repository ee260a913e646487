use std::io::{self, Read};

use legv8_rs::isa::legv8::Legv8Decoder;
use legv8_rs::listing::{Error, OPCODE_NOT_FOUND};
use legv8_rs::Disassembler;

const ADD: u32 = 0b10001011000;
const HALT: u32 = 0b11111111111;

fn enc_r(opcode: u32, rm: u32, shamt: u32, rn: u32, rd: u32) -> u32 {
    (opcode << 21) | (rm << 16) | (shamt << 10) | (rn << 5) | rd
}

fn image(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for w in words {
        bytes.extend_from_slice(&w.to_be_bytes());
    }
    bytes
}

fn listing_of(bytes: &[u8]) -> String {
    let dec = Legv8Decoder::new();
    let mut dis = Disassembler::new();
    let mut out = Vec::new();
    dis.write_listing(&dec, bytes, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn labels_are_sequential_from_one() {
    let bytes = image(&[
        enc_r(ADD, 0, 0, 0, 0),
        enc_r(ADD, 3, 0, 2, 1),
        enc_r(HALT, 0, 0, 0, 0),
    ]);
    assert_eq!(
        listing_of(&bytes),
        "L1: ADD X0, X0, X0\nL2: ADD X1, X2, X3\nL3: HALT\n"
    );
}

#[test]
fn failed_decode_emits_diagnostic_and_keeps_label() {
    // the zero word matches no field width
    let bytes = image(&[enc_r(ADD, 0, 0, 0, 0), 0x0000_0000, enc_r(ADD, 3, 0, 2, 1)]);
    let expect = format!("L1: ADD X0, X0, X0\n{OPCODE_NOT_FOUND}\nL2: ADD X1, X2, X3\n");
    assert_eq!(listing_of(&bytes), expect);
}

#[test]
fn line_error_does_not_consume_label() {
    let dec = Legv8Decoder::new();
    let mut dis = Disassembler::new();
    let err = dis.line(&dec, 0x0000_0000).unwrap_err();
    assert!(matches!(err, Error::UnknownOpcode { word: 0 }));
    assert_eq!(dis.label, 1);
    assert_eq!(dis.line(&dec, enc_r(ADD, 0, 0, 0, 0)).unwrap(), "L1: ADD X0, X0, X0");
}

#[test]
fn unknown_opcode_error_names_the_word() {
    let dec = Legv8Decoder::new();
    let mut dis = Disassembler::new();
    let err = dis.line(&dec, 0x0000_0000).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no opcode field of 0x00000000 matches the instruction table"
    );
}

#[test]
fn trailing_partial_word_is_dropped() {
    // any leftover tail of 1..=3 bytes reads as end of input
    let tails: [&[u8]; 3] = [&[0xAA], &[0xAA, 0xBB], &[0xAA, 0xBB, 0xCC]];
    for tail in tails {
        let mut bytes = image(&[enc_r(ADD, 0, 0, 0, 0), enc_r(HALT, 0, 0, 0, 0)]);
        bytes.extend_from_slice(tail);
        assert_eq!(listing_of(&bytes), "L1: ADD X0, X0, X0\nL2: HALT\n");
    }
}

#[test]
fn empty_input_yields_empty_listing() {
    assert_eq!(listing_of(&[]), "");
}

#[test]
fn words_are_read_big_endian() {
    // 0x8B010020 spelled out byte by byte
    let bytes = [0x8B, 0x01, 0x00, 0x20];
    assert_eq!(listing_of(&bytes), "L1: ADD X0, X1, X1\n");
}

#[test]
fn reset_restarts_the_label_sequence() {
    let dec = Legv8Decoder::new();
    let mut dis = Disassembler::new();
    dis.line(&dec, enc_r(ADD, 0, 0, 0, 0)).unwrap();
    dis.line(&dec, enc_r(ADD, 0, 0, 0, 0)).unwrap();
    assert_eq!(dis.label, 3);
    dis.reset();
    assert_eq!(dis.label, 1);
    assert_eq!(dis.line(&dec, enc_r(HALT, 0, 0, 0, 0)).unwrap(), "L1: HALT");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "boom"))
    }
}

#[test]
fn read_errors_abort_the_run() {
    let dec = Legv8Decoder::new();
    let mut dis = Disassembler::new();
    let mut out = Vec::new();
    let err = dis.write_listing(&dec, FailingReader, &mut out).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(out.is_empty());
}
