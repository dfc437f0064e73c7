/// Built-in demonstration program: scatters random hex digits over the
/// screen, clearing it every 256 glyphs.
#[rustfmt::skip]
static EXAMPLE_PROGRAM: [u8; 20] = [
    0x00, 0xE0, // 0x200  CLS
    0xC0, 0x0F, // 0x202  RND V0, 0x0f    digit
    0xC1, 0x3F, // 0x204  RND V1, 0x3f    x
    0xC2, 0x1F, // 0x206  RND V2, 0x1f    y
    0xF0, 0x29, // 0x208  LD F, V0
    0xD1, 0x25, // 0x20a  DRW V1, V2, 5
    0x73, 0x01, // 0x20c  ADD V3, 0x01
    0x33, 0x00, // 0x20e  SE V3, 0x00
    0x12, 0x02, // 0x210  JP 0x202
    0x12, 0x00, // 0x212  JP 0x200
];

/// the program the host runs when it isn't given one
pub fn get_example_program() -> &'static [u8] {
    &EXAMPLE_PROGRAM
}
