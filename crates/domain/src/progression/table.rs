//! The canonical experience table.
//!
//! 136 checkpoints covering cumulative XP 0 through 135. Each row records the
//! total gold pieces banked by the time a character reaches that XP total and
//! the character level in effect from that point on. Levels run 3 through 20;
//! rows past the level-20 threshold keep growing GP while the level stays flat.

use super::ProgressionStep;

const fn step(threshold_xp: i64, cumulative_gp: i64, level: u8) -> ProgressionStep {
    ProgressionStep {
        threshold_xp,
        cumulative_gp,
        level,
    }
}

pub(super) static PROGRESSION_TABLE: [ProgressionStep; 136] = [
    step(0, 0, 3),
    step(1, 65, 3),
    step(2, 130, 4),
    step(3, 235, 4),
    step(4, 340, 5),
    step(5, 450, 5),
    step(6, 560, 5),
    step(7, 670, 6),
    step(8, 840, 6),
    step(9, 1010, 6),
    step(10, 1180, 7),
    step(11, 1360, 7),
    step(12, 1540, 7),
    step(13, 1720, 7),
    step(14, 1900, 8),
    step(15, 2150, 8),
    step(16, 2400, 8),
    step(17, 2650, 8),
    step(18, 2900, 9),
    step(19, 3185, 9),
    step(20, 3470, 9),
    step(21, 3755, 9),
    step(22, 4040, 9),
    step(23, 4325, 10),
    step(24, 4725, 10),
    step(25, 5125, 10),
    step(26, 5525, 10),
    step(27, 5925, 10),
    step(28, 6325, 11),
    step(29, 6805, 11),
    step(30, 7285, 11),
    step(31, 7765, 11),
    step(32, 8245, 11),
    step(33, 8725, 11),
    step(34, 9205, 12),
    step(35, 9895, 12),
    step(36, 10585, 12),
    step(37, 11275, 12),
    step(38, 11965, 12),
    step(39, 12655, 12),
    step(40, 13345, 13),
    step(41, 14245, 13),
    step(42, 15145, 13),
    step(43, 16045, 13),
    step(44, 16945, 13),
    step(45, 17845, 13),
    step(46, 18745, 13),
    step(47, 19645, 14),
    step(48, 20955, 14),
    step(49, 22265, 14),
    step(50, 23575, 14),
    step(51, 24885, 14),
    step(52, 26195, 14),
    step(53, 27505, 14),
    step(54, 28815, 15),
    step(55, 30515, 15),
    step(56, 32215, 15),
    step(57, 33915, 15),
    step(58, 35615, 15),
    step(59, 37315, 15),
    step(60, 39015, 15),
    step(61, 40715, 15),
    step(62, 42415, 16),
    step(63, 44995, 16),
    step(64, 47575, 16),
    step(65, 50155, 16),
    step(66, 52735, 16),
    step(67, 55315, 16),
    step(68, 57895, 16),
    step(69, 60475, 16),
    step(70, 63055, 17),
    step(71, 66615, 17),
    step(72, 70175, 17),
    step(73, 73735, 17),
    step(74, 77295, 17),
    step(75, 80855, 17),
    step(76, 84415, 17),
    step(77, 87975, 17),
    step(78, 91535, 17),
    step(79, 95095, 18),
    step(80, 100875, 18),
    step(81, 106655, 18),
    step(82, 112435, 18),
    step(83, 118215, 18),
    step(84, 123995, 18),
    step(85, 129775, 18),
    step(86, 135555, 18),
    step(87, 141335, 18),
    step(88, 147115, 19),
    step(89, 155990, 19),
    step(90, 164865, 19),
    step(91, 173740, 19),
    step(92, 182615, 19),
    step(93, 191490, 19),
    step(94, 200365, 19),
    step(95, 209240, 19),
    step(96, 218115, 19),
    step(97, 226990, 19),
    step(98, 235865, 20),
    step(99, 245865, 20),
    step(100, 255865, 20),
    step(101, 265865, 20),
    step(102, 275865, 20),
    step(103, 285865, 20),
    step(104, 295865, 20),
    step(105, 305865, 20),
    step(106, 315865, 20),
    step(107, 325865, 20),
    step(108, 335865, 20),
    step(109, 345865, 20),
    step(110, 355865, 20),
    step(111, 365865, 20),
    step(112, 375865, 20),
    step(113, 385865, 20),
    step(114, 395865, 20),
    step(115, 405865, 20),
    step(116, 415865, 20),
    step(117, 425865, 20),
    step(118, 435865, 20),
    step(119, 445865, 20),
    step(120, 455865, 20),
    step(121, 465865, 20),
    step(122, 475865, 20),
    step(123, 485865, 20),
    step(124, 495865, 20),
    step(125, 505865, 20),
    step(126, 515865, 20),
    step(127, 525865, 20),
    step(128, 535865, 20),
    step(129, 545865, 20),
    step(130, 555865, 20),
    step(131, 565865, 20),
    step(132, 575865, 20),
    step(133, 585865, 20),
    step(134, 595865, 20),
    step(135, 605865, 20),
];
