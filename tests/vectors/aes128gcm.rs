#![cfg(feature = "test-vectors")]

#[macro_use]
#[path = "gcm_tests.rs"]
mod gcm_tests;

use aes_easy::{Cipher, Error, Key, Nonce};
use gcm_tests::TestVector;
use hex_literal::hex;

// test cases 1-4
const TEST_VECTORS: &[TestVector<[u8; 16]>] = &[
    TestVector {
        key: &hex!("00000000000000000000000000000000"),
        nonce: &hex!("000000000000000000000000"),
        aad: b"",
        plaintext: b"",
        ciphertext: b"",
        tag: &hex!("58e2fccefa7e3061367f1d57a4e7455a"),
    },
    TestVector {
        key: &hex!("00000000000000000000000000000000"),
        nonce: &hex!("000000000000000000000000"),
        aad: b"",
        plaintext: &hex!("00000000000000000000000000000000"),
        ciphertext: &hex!("0388dace60b6a392f328c2b971b2fe78"),
        tag: &hex!("ab6e47d42cec13bdf53a67b21257bddf"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308"),
        nonce: &hex!("cafebabefacedbaddecaf888"),
        aad: b"",
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a"
            "86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525"
            "b16aedf5aa0de657ba637b391aafd255"
        ),
        ciphertext: &hex!(
            "42831ec2217774244b7221b784d0d49c"
            "e3aa212f2c02a4e035c17e2329aca12e"
            "21d514b25466931c7d8f6a5aac84aa05"
            "1ba30b396a0aac973d58e091473f5985"
        ),
        tag: &hex!("4d5c2af327cd64a62cf35abd2ba6fab4"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308"),
        nonce: &hex!("cafebabefacedbaddecaf888"),
        aad: &hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2"),
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a"
            "86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525"
            "b16aedf5aa0de657ba637b39"
        ),
        ciphertext: &hex!(
            "42831ec2217774244b7221b784d0d49c"
            "e3aa212f2c02a4e035c17e2329aca12e"
            "21d514b25466931c7d8f6a5aac84aa05"
            "1ba30b396a0aac973d58e091"
        ),
        tag: &hex!("5bc94fbc3221a5db94fae95ae7121a47"),
    },
];

gcm_tests!(TEST_VECTORS);
