#![cfg(feature = "test-vectors")]

#[macro_use]
#[path = "gcm_tests.rs"]
mod gcm_tests;

use aes_easy::{Cipher, Error, Key, Nonce};
use gcm_tests::TestVector;
use hex_literal::hex;

// test cases 13-16
const TEST_VECTORS: &[TestVector<[u8; 32]>] = &[
    TestVector {
        key: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        nonce: &hex!("000000000000000000000000"),
        aad: b"",
        plaintext: b"",
        ciphertext: b"",
        tag: &hex!("530f8afbc74536b9a963b4f1c4cb738b"),
    },
    TestVector {
        key: &hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        nonce: &hex!("000000000000000000000000"),
        aad: b"",
        plaintext: &hex!("00000000000000000000000000000000"),
        ciphertext: &hex!("cea7403d4d606b6e074ec5d3baf39d18"),
        tag: &hex!("d0d1c8a799996bf0265b98b5d48ab919"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308"),
        nonce: &hex!("cafebabefacedbaddecaf888"),
        aad: b"",
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a"
            "86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525"
            "b16aedf5aa0de657ba637b391aafd255"
        ),
        ciphertext: &hex!(
            "522dc1f099567d07f47f37a32a84427d"
            "643a8cdcbfe5c0c97598a2bd2555d1aa"
            "8cb08e48590dbb3da7b08b1056828838"
            "c5f61e6393ba7a0abcc9f662898015ad"
        ),
        tag: &hex!("b094dac5d93471bdec1a502270e3cc6c"),
    },
    TestVector {
        key: &hex!("feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308"),
        nonce: &hex!("cafebabefacedbaddecaf888"),
        aad: &hex!("feedfacedeadbeeffeedfacedeadbeefabaddad2"),
        plaintext: &hex!(
            "d9313225f88406e5a55909c5aff5269a"
            "86a7a9531534f7da2e4c303d8a318a72"
            "1c3c0c95956809532fcf0e2449a6b525"
            "b16aedf5aa0de657ba637b39"
        ),
        ciphertext: &hex!(
            "522dc1f099567d07f47f37a32a84427d"
            "643a8cdcbfe5c0c97598a2bd2555d1aa"
            "8cb08e48590dbb3da7b08b1056828838"
            "c5f61e6393ba7a0abcc9f662"
        ),
        tag: &hex!("76fc6ece0f4e1768cddf8853bb2d551b"),
    },
];

gcm_tests!(TEST_VECTORS);
