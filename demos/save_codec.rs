use std::fs;

use lettercode::{Codec, SerializableCodec, ENGLISH};

fn main() {
    // build and save scope
    {
        let codec = Codec::from_probabilities(&ENGLISH).unwrap();
        let packed = rmp_serde::to_vec(&SerializableCodec::from(&codec)).unwrap();
        fs::write("codec.mp", packed).unwrap();
    }

    // load and use scope
    {
        let data = fs::read("codec.mp").unwrap();
        let restored: Codec = rmp_serde::from_slice::<SerializableCodec>(&data)
            .unwrap()
            .into();

        let encoded = restored.encode("SAVED AND RESTORED").unwrap();
        println!("{}", encoded);
        println!("{}", restored.decode(&encoded).unwrap());
    }
}
