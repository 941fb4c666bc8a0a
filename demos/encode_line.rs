use lettercode::{Codec, ENGLISH};

fn main() {
    let codec = Codec::from_probabilities(&ENGLISH).unwrap();

    let line = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    let encoded = codec.encode(line).unwrap();
    let decoded = codec.decode(&encoded).unwrap();

    println!("{}", encoded);
    println!("{:?}", decoded);
}
