pub mod fields;
pub mod input;
pub mod jwt;
pub mod signature;

/*

fixed capacities on the prover side, ascii codes zero padded:

    jwt       1536   header '.' payload
    header     300   including the trailing '.'
    payload   1472

modulus and signature are 2048 bit -> 32 le u64 limbs
pubkey is uncompressed x || y -> 4 be 128 bit chunks

claim spans (start index + length in the decoded payload) go in as
decimal strings next to the byte vectors, the circuit re-reads the
claim bytes at that offset

*/

#[cfg(test)]
pub(crate) const SAMPLE_JWT: &str = "eyJhbGciOiJSUzI1NiIsImtpZCI6ImM3ZTA0NDY1NjQ5ZmZhNjA2NTU3NjUwYzdlNjVmMGE4N2FlMDBmZTgiLCJ0eXAiOiJKV1QifQ.eyJpc3MiOiJodHRwczovL2FjY291bnRzLmdvb2dsZS5jb20iLCJhenAiOiIzMjEyOTQ2MTk3NzYtcGtybnFkaThyYTZndnN1MmZxZjdrN2VidDE3Nmlvc28uYXBwcy5nb29nbGV1c2VyY29udGVudC5jb20iLCJhdWQiOiIzMjEyOTQ2MTk3NzYtcGtybnFkaThyYTZndnN1MmZxZjdrN2VidDE3Nmlvc28uYXBwcy5nb29nbGV1c2VyY29udGVudC5jb20iLCJzdWIiOiIxMTI5NTIzNjA2NzQyMDUxNjM0MzkiLCJub25jZSI6ImNhOTc4MTEyY2ExYmJkY2FmYWMyMzFiMzlhMjNkYzRkYTc4NmVmZjgxNDdjNGU3MmI5ODA3Nzg1YWZlZTQ4YmIiLCJuYmYiOjE3NDQ2NDMxNDQsImlhdCI6MTc0NDY0MzQ0NCwiZXhwIjoxNzQ0NjQ3MDQ0LCJqdGkiOiI2ZmY3YThhMjRhOTUwMTk3Y2EzOTBlOGM5NTgyZTQ2MzQwMjkyZjZhIn0.n7dc-8FjreyQ-vNzNCIKNxuWerQK9s5B39OGRRWGzflCjUTPFvRZurUsR0xPnLY0V4EwR1klcrvyamVlFRycy2t3Nia3-2uMtRfF4qzxcBNs6V5gf8fl0u5yhNC5Sx2Rry3ksSU4mgMIUlqNk04z9ZDqsEOSflgzMe2gR-RooySRAXNEQzeI6G1vsKNF15JE4wh31OC3HSRgo5QrUr6e26sqZLQnazj21Exh4qvRSJkd-WwnHmYqJXcJYKgobsstlpVdMUEk7e0-Uk-b59YMmCTbIAZ1HCNaqTQ3YdiMHgdVC-Ecmzp_F9kJwCj34LS9Xy-h-uygTIEJRq0RJ31JIQ";
