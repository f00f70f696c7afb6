// Generates the metadata message types from the .proto files in resources/.
// The metadata itself ships as protobuf text format and is parsed at runtime.

fn main() {
    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input("resources/phonemetadata.proto")
        .input("resources/phonenumber.proto")
        .customize(protobuf_codegen::Customize::default().gen_mod_rs(true))
        .cargo_out_dir("proto_gen")
        .run_from_script();

    println!("cargo:rerun-if-changed=resources");
}
