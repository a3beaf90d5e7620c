//! Shared harness for the known-answer suites. Vectors are from McGrew & Viega,
//! "The Galois/Counter Mode of Operation (GCM)", Appendix B, all with 96-bit IVs.

#[derive(Debug)]
pub struct TestVector<K: 'static> {
    pub key: &'static K,
    pub nonce: &'static [u8; 12],
    pub aad: &'static [u8],
    pub plaintext: &'static [u8],
    pub ciphertext: &'static [u8],
    pub tag: &'static [u8; 16],
}

/// `nonce || ciphertext || tag`
pub fn pack_bundle(nonce: &[u8; 12], ciphertext: &[u8], tag: &[u8; 16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + ciphertext.len() + 16);
    out.extend_from_slice(nonce);
    out.extend_from_slice(ciphertext);
    out.extend_from_slice(tag);
    out
}

/// Generates encrypt/decrypt/reject tests over a slice of [`TestVector`]s.
macro_rules! gcm_tests {
    ($vectors:expr) => {
        fn cipher_for<K: AsRef<[u8]>>(key: &K) -> Cipher {
            Cipher::new(&Key::try_from_slice(key.as_ref()).expect("vector key has an AES length"))
        }

        #[test]
        fn vectors_encrypt_matches() {
            for (i, vector) in $vectors.iter().enumerate() {
                let cipher = cipher_for(vector.key);
                let got = cipher
                    .encrypt_with_nonce(&Nonce::from_bytes(*vector.nonce), vector.plaintext, vector.aad)
                    .expect("encrypt should succeed");
                let expected =
                    crate::gcm_tests::pack_bundle(vector.nonce, vector.ciphertext, vector.tag);
                assert_eq!(expected, got, "vector {i}");
            }
        }

        #[test]
        fn vectors_decrypt_ok() {
            for (i, vector) in $vectors.iter().enumerate() {
                let cipher = cipher_for(vector.key);
                let bundle =
                    crate::gcm_tests::pack_bundle(vector.nonce, vector.ciphertext, vector.tag);
                let pt = cipher
                    .decrypt(&bundle, vector.aad)
                    .expect("valid vector should decrypt");
                assert_eq!(vector.plaintext, pt.as_slice(), "vector {i}");
            }
        }

        #[test]
        fn vectors_reject_bad_tag() {
            for vector in $vectors {
                let cipher = cipher_for(vector.key);
                let mut bundle =
                    crate::gcm_tests::pack_bundle(vector.nonce, vector.ciphertext, vector.tag);
                let last = bundle.len() - 1;
                bundle[last] ^= 0x01;
                assert!(matches!(
                    cipher.decrypt(&bundle, vector.aad),
                    Err(Error::AuthenticationFailed)
                ));
            }
        }

        #[test]
        fn vectors_reject_tampered_ciphertext_or_nonce() {
            for vector in $vectors {
                let cipher = cipher_for(vector.key);
                let mut bundle =
                    crate::gcm_tests::pack_bundle(vector.nonce, vector.ciphertext, vector.tag);
                // first ciphertext byte if there is one, otherwise the nonce
                if vector.ciphertext.is_empty() {
                    bundle[0] ^= 0x01;
                } else {
                    bundle[12] ^= 0x01;
                }
                assert!(matches!(
                    cipher.decrypt(&bundle, vector.aad),
                    Err(Error::AuthenticationFailed)
                ));
            }
        }

        #[test]
        fn vectors_reject_changed_aad() {
            for vector in $vectors {
                let cipher = cipher_for(vector.key);
                let bundle =
                    crate::gcm_tests::pack_bundle(vector.nonce, vector.ciphertext, vector.tag);
                let mut aad = vector.aad.to_vec();
                aad.push(0x00);
                assert!(matches!(
                    cipher.decrypt(&bundle, &aad),
                    Err(Error::AuthenticationFailed)
                ));
            }
        }
    };
}
